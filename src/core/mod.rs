pub mod bounds;
pub mod coordinate_mapper;
pub mod label_slots;
pub mod overlap;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod series;
pub mod series_order;
pub mod types;

pub use bounds::{RANGE_STEP, ValueRange, calculate_bounds};
pub use coordinate_mapper::{XIndex, project_lines, project_series_line, vertical_scale};
pub use label_slots::{
    DEFAULT_STEP_LIMIT_PER_LABEL, LabelLayout, LabelPackerConfig, ReservationList, SlotInterval,
    pack_label_slots,
};
pub use overlap::{
    DEFAULT_DASH_CYCLES_PER_SEGMENT, DEFAULT_OVERLAP_TOLERANCE_RATIO, DashPattern, DashPhase,
    OverlapAnalysis, OverlapConfig, UnionFind, analyze_overlaps, segments_overlap,
    values_coincide,
};
pub use palette::{ColorAssigner, DEFAULT_PALETTE, palette_color};
pub use scale::LinearScale;
pub use scene::{Scene, SceneConfig};
pub use series::{Series, SeriesInput};
pub use series_order::{DEFAULT_ORDER_TOP_INDEX, ORDER_BOTTOM_INDEX, compare_samples, order_series};
pub use types::{PlotArea, Viewport};
