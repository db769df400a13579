mod fragment_registry;
mod operation_kind;
mod operation_names;
mod operation_record;

pub use fragment_registry::FragmentRegistry;
pub use fragment_registry::LoadedFragment;
pub use operation_kind::OperationKind;
pub use operation_names::OperationNames;
pub use operation_record::OperationRecord;
