pub mod config;
pub mod model;
pub mod parser;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Config;
pub use model::entry::{DateKind, Entry, EntryDraft, EntryId, OrgDate};
pub use model::outline::Outline;
pub use model::task::{ResolvedDate, Task};
pub use parser::{parse_outline, scan_filetags};
pub use repository::{FileOutlineRepository, OutlineRepository};
pub use service::dto::TaskDto;
pub use service::extract::extract_tasks;
pub use service::rank::{render_line, sort_tasks};
pub use service::resolve::closest;
pub use service::task_service::TaskService;
pub use time::{parse_reference, parse_reference_at};
