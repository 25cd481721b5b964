//! Command-line interface definitions for jkcli.
//!
//! Defines the CLI structure, commands, and arguments for the JK Jenkins
//! client.

use clap::{Parser, Subcommand};

/// JK Command Line Interface for inspecting a Jenkins server.
#[derive(Parser)]
#[command(name = "jk")]
#[command(about = "JK CLI - Inspect Jenkins jobs, builds, queues, and nodes")]
pub struct Cli {
    /// Jenkins server URL (defaults to the JENKINS_URL environment variable)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Jenkins user (defaults to the JENKINS_USER environment variable)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Jenkins API token (defaults to the JENKINS_PW environment variable)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Verbose mode. Print full job output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show failed salt states
    #[arg(long, global = true)]
    pub salt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the JK Jenkins client.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the status of all matching jobs
    Status {
        /// The regular expression to match for the job names
        #[arg(default_value = ".*")]
        regex: String,
    },

    /// Show the logs of a job
    Logs {
        /// The name of the job to get logs for
        job: String,
    },

    /// Show the queue of all matching jobs
    Queue {
        /// The regular expression to match for the job names
        #[arg(default_value = ".*")]
        regex: String,
    },

    /// Show the status of all Jenkins nodes
    Nodes,

    /// Open a job in the browser
    Open {
        /// The regular expression to match for the job names
        #[arg(default_value = ".*")]
        regex: String,
    },
}
