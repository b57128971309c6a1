pub mod snapshot;
pub mod task;
pub mod view;

pub use snapshot::TaskList;
pub use task::{NewTask, Priority, Task, TaskPatch};
pub use view::{build_view, Tab, TabCounts, TaskView};
