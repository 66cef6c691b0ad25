pub mod apply;
pub mod criteria;
pub mod paging;
pub mod parse;
