//! Probes for the data held at a single address.

use tl_03_record_schemas::{Record, SchemaError, WorkItem, WorkItemLayout};

/// Interpret `data` as a `T`.
///
/// `Ok(None)` when there is no account or it holds another kind; truncated
/// and malformed records are errors.
pub fn probe<T: Record>(data: Option<&[u8]>) -> Result<Option<T>, SchemaError> {
    let Some(data) = data else {
        return Ok(None);
    };
    match T::decode(data) {
        Ok(record) => Ok(Some(record)),
        Err(e) if e.is_wrong_kind() => Ok(None),
        Err(e) => Err(e),
    }
}

/// [`probe`] for work items, which need the deployment's layout.
pub fn probe_work_item(
    data: Option<&[u8]>,
    layout: WorkItemLayout,
) -> Result<Option<WorkItem>, SchemaError> {
    let Some(data) = data else {
        return Ok(None);
    };
    match WorkItem::decode(data, layout) {
        Ok(item) => Ok(Some(item)),
        Err(e) if e.is_wrong_kind() => Ok(None),
        Err(e) => Err(e),
    }
}
