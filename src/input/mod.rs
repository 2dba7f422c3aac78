pub mod handler;
pub mod wordlist;

pub use handler::{InputHandler, KeyAction};
pub use wordlist::{load_words, normalize, read_words};
