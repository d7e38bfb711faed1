//! Fixed container refresh plan

use std::fmt;

use crate::app::options::DeployOptions;

/// One step of the deployment plan.
///
/// Commands are argument vectors, never shell strings. Tolerance to a
/// non-zero exit is explicit per step, not inferred from the command
/// text.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub tolerant: bool,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            tolerant: false,
        }
    }

    pub fn tolerant(program: &str, args: &[&str]) -> Self {
        Self {
            tolerant: true,
            ..Self::new(program, args)
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Build the fixed five-step refresh sequence for the managed container.
///
/// Stop and remove are tolerant: when no container with the configured
/// name exists yet, both exit non-zero and the refresh must still go on.
pub fn deployment_plan(options: &DeployOptions) -> Vec<CommandSpec> {
    let publish = format!("{}:{}", options.host_port, options.container_port);

    vec![
        CommandSpec::new("docker", &["pull", &options.image]),
        CommandSpec::tolerant("docker", &["stop", &options.container_name]),
        CommandSpec::tolerant("docker", &["rm", &options.container_name]),
        CommandSpec::new(
            "docker",
            &[
                "run",
                "-d",
                "--name",
                &options.container_name,
                "--restart",
                &options.restart_policy,
                "-p",
                &publish,
                &options.image,
            ],
        ),
        CommandSpec::new("docker", &["image", "prune", "-f"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_five_ordered_steps() {
        let plan = deployment_plan(&DeployOptions::default());

        assert_eq!(plan.len(), 5);
        assert!(plan.iter().all(|step| step.program == "docker"));

        let subcommands: Vec<&str> = plan.iter().map(|s| s.args[0].as_str()).collect();
        assert_eq!(subcommands, ["pull", "stop", "rm", "run", "image"]);
    }

    #[test]
    fn test_only_stop_and_rm_are_tolerant() {
        let plan = deployment_plan(&DeployOptions::default());

        let tolerance: Vec<bool> = plan.iter().map(|s| s.tolerant).collect();
        assert_eq!(tolerance, [false, true, true, false, false]);
    }

    #[test]
    fn test_run_step_publishes_configured_ports() {
        let options = DeployOptions {
            host_port: 8080,
            container_port: 3000,
            ..DeployOptions::default()
        };
        let plan = deployment_plan(&options);

        assert!(plan[3].args.contains(&"8080:3000".to_string()));
        assert!(plan[3].to_string().starts_with("docker run -d --name"));
    }
}
