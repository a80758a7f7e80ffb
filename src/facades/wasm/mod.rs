pub mod converters;
pub mod notice;

pub use notice::JsNoticeChannel;
