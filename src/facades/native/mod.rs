pub mod notice;

pub use notice::NoticeManager;
