pub mod hiring;
pub mod submissions;

pub use hiring::HiringPage;
pub use submissions::SubmissionsPage;
