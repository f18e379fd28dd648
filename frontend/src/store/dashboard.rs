//! Headline counts for the admin dashboard.

use common::model::{BlogPost, GalleryItem, Inquiry, InquiryStatus, Service};
use futures_util::future::try_join4;
use log::info;

use super::client::StoreClient;
use super::error::StoreResult;
use super::transport::Transport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub services: usize,
    pub blog_posts: usize,
    pub gallery_items: usize,
    pub inquiries: usize,
    /// Inquiries still in `pending`.
    pub pending_inquiries: usize,
}

impl DashboardSummary {
    /// Lists the four tables concurrently. The first failure wins and no
    /// partial summary is returned.
    pub async fn load<T: Transport>(store: &StoreClient<T>) -> StoreResult<Self> {
        let services = store.resource::<Service>();
        let blog_posts = store.resource::<BlogPost>();
        let gallery = store.resource::<GalleryItem>();
        let inquiries = store.resource::<Inquiry>();

        let (services, blog_posts, gallery_items, inquiries) = try_join4(
            services.list(),
            blog_posts.list(),
            gallery.list(),
            inquiries.list(),
        )
        .await?;

        let pending_inquiries = inquiries
            .iter()
            .filter(|record| record.data.status == InquiryStatus::Pending)
            .count();
        let summary = Self {
            services: services.len(),
            blog_posts: blog_posts.len(),
            gallery_items: gallery_items.len(),
            inquiries: inquiries.len(),
            pending_inquiries,
        };
        info!(
            "event=dashboard_loaded services={} blog_posts={} gallery_items={} inquiries={} pending={}",
            summary.services,
            summary.blog_posts,
            summary.gallery_items,
            summary.inquiries,
            summary.pending_inquiries
        );
        Ok(summary)
    }
}
