//! Business logic use cases
//!
//! [Host runtime share event]
//         ↓
// NormalizeShareEventUseCase   → {action, exit, items}
//         ↓
// LoadShareItemDataUseCase     → Base64 content, on demand per item

pub mod share;
