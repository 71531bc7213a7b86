pub mod bullet_list;
pub mod paragraph;

pub use bullet_list::{BulletList, BulletParts};
pub use paragraph::Paragraph;
