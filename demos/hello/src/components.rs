use std::{fs, sync::Arc};

use lightwire::{Arguments, Command, CommandResult, DynError, Request, RequestHandler};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("Controller '{controller}' has no action '{action}'")]
    UnknownAction { controller: String, action: String },
}

pub struct Greeter {
    greeting: String,
}

impl Greeter {
    pub fn factory(args: &Arguments) -> Result<Self, DynError> {
        Ok(Greeter {
            greeting: args.get(0)?,
        })
    }

    pub fn greet(&self, name: &str) -> String {
        format!("{}, {name}!", self.greeting)
    }
}

pub struct PageController {
    title: String,
    greeter: Arc<Greeter>,
}

impl PageController {
    pub fn factory(args: &Arguments) -> Result<Self, DynError> {
        Ok(PageController {
            title: args.get(0)?,
            greeter: args.get(1)?,
        })
    }

    fn render(&self, action: &str) -> Result<String, HelloError> {
        match action {
            "index" => Ok(format!("{}: {}", self.title, self.greeter.greet("visitor"))),
            "details" => Ok(format!("{} page, served by lightwire", self.title)),
            _ => Err(HelloError::UnknownAction {
                controller: self.title.clone(),
                action: action.to_string(),
            }),
        }
    }
}

/// Application starting point
pub struct Kernel {
    controller: Arc<PageController>,
    signature: String,
}

impl Kernel {
    pub fn factory(args: &Arguments) -> Result<Self, DynError> {
        let action: String = args.get(1)?;
        tracing::debug!(action = %action, "Kernel wired");

        Ok(Kernel {
            controller: args.get(0)?,
            signature: args.get(2)?,
        })
    }
}

impl RequestHandler for Kernel {
    fn process(&self, request: &Request) -> Result<(), DynError> {
        let page = self.controller.render(request.action())?;
        println!("{page}\n-- {}", self.signature);
        Ok(())
    }
}

/// Reports how many entries the cache directory holds
pub struct InspectCache {
    dir: String,
}

impl InspectCache {
    pub fn factory(args: &Arguments) -> Result<Self, DynError> {
        Ok(InspectCache { dir: args.get(0)? })
    }
}

impl Command for InspectCache {
    fn execute(&self) -> CommandResult {
        match fs::read_dir(&self.dir) {
            Ok(entries) => CommandResult::success(format!(
                "{} holds {} entries",
                self.dir,
                entries.count()
            )),
            Err(err) => CommandResult::failure(format!("{}: {err}", self.dir)),
        }
    }
}
