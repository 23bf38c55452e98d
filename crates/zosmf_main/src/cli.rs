use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use zosmf_domain::MountMode;

#[derive(Parser, Debug)]
#[command(name = "zosmf", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Directory for daily rolling JSON logs. Logs go to stderr when unset.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection flags. Anything left out is read from the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// z/OSMF host, optionally with a scheme prefix.
    #[arg(long, global = true)]
    pub host: Option<String>,

    #[arg(long, global = true)]
    pub port: Option<u16>,

    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Accept server certificates that cannot be verified.
    #[arg(long, global = true, default_value_t = false)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// z/OS UNIX files and directories
    Uss {
        #[command(subcommand)]
        command: UssCommand,
    },
    /// zFS aggregates and mounts
    Zfs {
        #[command(subcommand)]
        command: ZfsCommand,
    },
    /// Sequential and partitioned datasets
    Ds {
        #[command(subcommand)]
        command: DsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum UssCommand {
    Delete {
        path: String,
        #[arg(long, short)]
        recursive: bool,
    },
    List {
        path: String,
    },
    Read {
        path: String,
    },
    /// Write text read from `--data` or from a local file
    Write {
        path: String,
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Create {
        path: String,
        #[arg(long)]
        directory: bool,
        /// Symbolic permissions, e.g. rwxr-xr-x
        #[arg(long)]
        mode: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ZfsCommand {
    Create {
        name: String,
        #[arg(long)]
        cyls_pri: u64,
        #[arg(long)]
        cyls_sec: u64,
        /// Octal permission digits, e.g. 755. z/OSMF picks a default when unset.
        #[arg(long, allow_negative_numbers = true)]
        perms: Option<i64>,
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        storage_class: Option<String>,
        #[arg(long)]
        volume: Vec<String>,
    },
    Delete {
        name: String,
    },
    Mount {
        name: String,
        mount_point: String,
        #[arg(long, default_value = "zFS")]
        fs_type: String,
        /// rdonly or rdwr
        #[arg(long, default_value_t = MountMode::Rdonly)]
        mode: MountMode,
    },
    Unmount {
        name: String,
    },
    List {
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        fsname: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DsCommand {
    Rename {
        old: String,
        new: String,
    },
    RenameMember {
        dsn: String,
        old_member: String,
        new_member: String,
        /// EXCLU or SHRW
        #[arg(long)]
        enq: Option<String>,
    },
    /// Create a dataset from a JSON object of allocation options
    Create {
        name: String,
        #[arg(long)]
        options: String,
    },
    /// Create a dataset from a preset: partitioned, sequential, classic, c,
    /// binary
    CreateDefault {
        name: String,
        #[arg(long = "type", default_value = "partitioned")]
        default_type: String,
    },
    List {
        pattern: String,
        #[arg(long)]
        attributes: bool,
    },
    Members {
        dsn: String,
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        max_items: Option<u32>,
    },
    Read {
        dsn: String,
    },
    Write {
        dsn: String,
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Delete {
        dsn: String,
        #[arg(long)]
        volume: Option<String>,
        #[arg(long)]
        member: Option<String>,
    },
}
