//! Draft and patch types, one module per remote table.

pub mod blog_post;
pub mod contact_inquiry;
pub mod event;
pub mod faq;
pub mod gallery_item;
pub mod inquiry;
pub mod service;

pub use blog_post::{BlogPost, BlogPostPatch};
pub use contact_inquiry::{ContactInquiry, ContactInquiryPatch, InquiryStatus};
pub use event::{Event, EventPatch};
pub use faq::{Faq, FaqPatch};
pub use gallery_item::{GalleryItem, GalleryItemPatch};
pub use inquiry::{Inquiry, InquiryPatch};
pub use service::{Service, ServicePatch};
