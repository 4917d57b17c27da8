pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::collections::{BTreeMap, HashMap};
pub use std::path::{Path, PathBuf};
