/// Catalog layer: core types, loading, querying and progress figures.
///
/// Architecture:
/// ```text
///  fixtures / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Course>, unique ids, category index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  term / category / level filters + stable sort → visible indices
///   └──────────┘
/// ```

pub mod fixtures;
pub mod loader;
pub mod model;
pub mod progress;
pub mod query;
