// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod channel_wrappers;
pub use channel_wrappers::{ChannelPairSource, ChannelTokenSink};

mod channel_transport;
pub use channel_transport::ChannelTransport;

mod tokio_runtime;
pub use tokio_runtime::TokioRuntime;
