mod extractors;
mod load_share_item_data;
mod normalize_share_event;

pub use load_share_item_data::LoadShareItemDataUseCase;
pub use normalize_share_event::NormalizeShareEventUseCase;
