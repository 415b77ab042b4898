// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod frame;

mod socket_wrappers;
pub use socket_wrappers::{SocketPairSource, SocketTokenSink};

mod socket_transport;
pub use socket_transport::SocketTransport;

mod thread_runtime;
pub use thread_runtime::ThreadRuntime;
