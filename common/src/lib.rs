//! Recipe Book Common Library
//!
//! CLIとWeb(WASM)で共有される型・フィルタ/ソート・画面状態

pub mod types;
pub mod criteria;
pub mod pipeline;
pub mod collection;
pub mod view;
pub mod gate;
pub mod routes;
pub mod error;

pub use types::{Favorite, Ingredient, Recipe, UserRef, parse_timestamp};
pub use criteria::{FilterCriteria, FilterForm, SortField, SortOrder, SortSpec};
pub use pipeline::{Listed, compare, filter_sort, matches};
pub use collection::{AllRecipes, Collection, Favorites, parse_favorites, parse_recipes};
pub use view::{ListState, Rendered};
pub use gate::{GateState, Probe, SessionValidity};
pub use routes::{Route, AUTH_ERROR_PATH};
pub use error::{FetchError, RecordError, SessionCheckError};
