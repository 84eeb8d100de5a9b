//! 基于游标的惰性查询流水线。
//!
//! 流水线由源游标和组合子按值嵌套而成，组合时不求值，也不分配中间集合；
//! 终止操作逐个拉取元素，并保证在任何退出路径上释放游标。
//!
//! ```
//! use zpipe::ToPipe;
//!
//! let words = ["apple", "Banana", "cherry"];
//! let long = words.pipe().filter(|w| w.len() > 5).map(|w| w.to_uppercase()).to(Vec::new());
//! assert_eq!(long, Ok(vec![String::from("BANANA"), String::from("CHERRY")]));
//! ```

#[macro_use]
mod log;

mod cursor;
mod err;
mod func;
mod input;
pub mod op;
mod output;
mod pipe;
mod view;

pub use cursor::Cursor;
pub use err::PipeErr;
pub use func::{Predicate, Selector, With};
pub use input::{ArrayCursor, IterCursor, ListCursor, Sequence, ToPipe};
pub use pipe::Pipe;
pub use view::{View, ViewIter};

pub type PipeRes<T> = Result<T, PipeErr>;
