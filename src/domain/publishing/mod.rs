pub mod context;

pub use context::{
    PublishChildAction, PublishItemContext, PublishItemResult, PublishOperation, PublishOptions,
};
