//! The module tool invoked after the layout has been written.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::ServiceName;

pub const DEFAULT_PROGRAM: &str = "go";

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Module-management tool: `<program> mod init <service>` then
/// `<program> mod tidy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: String,
}

impl Toolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn init_command(&self, service: &ServiceName) -> ExternalCommand {
        ExternalCommand::new(&self.program, ["mod", "init", service.as_str()])
    }

    pub fn tidy_command(&self) -> ExternalCommand {
        ExternalCommand::new(&self.program, ["mod", "tidy"])
    }

    /// Commands in execution order.
    pub fn module_commands(&self, service: &ServiceName) -> [ExternalCommand; 2] {
        [self.init_command(service), self.tidy_command()]
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commands_are_go_mod_init_then_tidy() {
        let name = ServiceName::parse("orders").unwrap();
        let [init, tidy] = Toolchain::default().module_commands(&name);
        assert_eq!(init.to_string(), "go mod init orders");
        assert_eq!(tidy.to_string(), "go mod tidy");
    }

    #[test]
    fn program_is_configurable() {
        let name = ServiceName::parse("orders").unwrap();
        let cmd = Toolchain::new("/usr/local/go/bin/go").init_command(&name);
        assert_eq!(cmd.program, "/usr/local/go/bin/go");
        assert_eq!(cmd.args, ["mod", "init", "orders"]);
    }
}
