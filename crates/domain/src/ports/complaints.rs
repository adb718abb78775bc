use crate::DomainResult;
use crate::complaints::{Complaint, ComplaintFilter, ComplaintMutation};
use crate::ports::BoxFuture;

pub trait ComplaintRepository: Send + Sync {
    /// Stores a new complaint at the top of the list.
    fn create(&self, complaint: &Complaint) -> BoxFuture<'_, DomainResult<Complaint>>;

    fn get(&self, complaint_id: &str) -> BoxFuture<'_, DomainResult<Option<Complaint>>>;

    /// Newest first.
    fn list(&self, filter: &ComplaintFilter) -> BoxFuture<'_, DomainResult<Vec<Complaint>>>;

    fn apply(
        &self,
        complaint_id: &str,
        mutation: &ComplaintMutation,
        at_ms: i64,
    ) -> BoxFuture<'_, DomainResult<Complaint>>;
}
