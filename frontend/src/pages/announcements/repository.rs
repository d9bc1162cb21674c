use crate::api::{
    Announcement, ApiClient, ApiError, CreateAnnouncement, ListQuery, ListResponse,
    MutationEnvelope,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AnnouncementsRepository {
    client: Rc<ApiClient>,
}

impl AnnouncementsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<ListResponse<Announcement>, ApiError> {
        self.client.list_announcements(&ListQuery::default()).await
    }

    pub async fn create(&self, payload: CreateAnnouncement) -> Result<MutationEnvelope, ApiError> {
        self.client.create_announcement(&payload).await
    }
}
