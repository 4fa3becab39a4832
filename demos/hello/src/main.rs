//! Minimal lightwire application
//!
//! ```sh
//! hello --config demos/hello/config serve --controller home --action index
//! hello --config demos/hello/config command inspect-cache
//! ```

use std::process::ExitCode;

use components::{Greeter, InspectCache, Kernel, PageController};
use lightwire::{CapabilityFactories, DiBuilder};

mod components;

fn main() -> ExitCode {
    let builder = DiBuilder::new()
        .add_handler("Kernel", Kernel::factory)
        .add_factory("Greeter", Greeter::factory)
        .add_factory("PageController", PageController::factory)
        .add_command("InspectCache", InspectCache::factory);

    lightwire::cli::run(builder)
}
