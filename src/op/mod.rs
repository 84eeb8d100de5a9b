//! 组合子游标：每个组合子按值持有其上游游标，整条流水线在编译期单态化为一个具体类型。

mod concat;
mod filter;
mod flatten;
mod map;

pub use concat::Concat;
pub use filter::Filter;
pub use flatten::Flatten;
pub use map::{Copied, Map};
