use std::path::PathBuf;

use anyhow::Context;
use serde_json::{Map, Value};
use zosmf_domain::{
    DatasetOptions, FileSystemFilter, MemberListOptions, MountOptions, UssCreateOptions,
    UssFileType, ZfsOptions, ZosmfResponse,
};
use zosmf_files::{Files, Transport};

use crate::cli::{Command, DsCommand, UssCommand, ZfsCommand};

/// Runs one command against `files` and returns the server's answer.
pub async fn run<T: Transport>(files: &Files<T>, command: Command) -> anyhow::Result<ZosmfResponse> {
    let response = match command {
        Command::Uss { command } => run_uss(files, command).await?,
        Command::Zfs { command } => run_zfs(files, command).await?,
        Command::Ds { command } => run_ds(files, command).await?,
    };
    Ok(response)
}

async fn run_uss<T: Transport>(
    files: &Files<T>,
    command: UssCommand,
) -> anyhow::Result<ZosmfResponse> {
    let response = match command {
        UssCommand::Delete { path, recursive } => files.delete_uss(&path, recursive).await?,
        UssCommand::List { path } => files.list_files(&path).await?,
        UssCommand::Read { path } => files.get_file_content(&path).await?,
        UssCommand::Write { path, data, file } => {
            let data = read_data(data, file).await?;
            files.write_to_uss(&path, &data).await?
        }
        UssCommand::Create { path, directory, mode } => {
            let file_type = if directory { UssFileType::Directory } else { UssFileType::File };
            let options = UssCreateOptions { file_type, mode };
            files.create_uss(&path, &options).await?
        }
    };
    Ok(response)
}

async fn run_zfs<T: Transport>(
    files: &Files<T>,
    command: ZfsCommand,
) -> anyhow::Result<ZosmfResponse> {
    let response = match command {
        ZfsCommand::Create {
            name,
            cyls_pri,
            cyls_sec,
            perms,
            owner,
            group,
            storage_class,
            volume,
        } => {
            let mut options = ZfsOptions::new(cyls_pri, cyls_sec);
            options.perms = perms;
            options.owner = owner;
            options.group = group;
            options.storage_class = storage_class;
            if !volume.is_empty() {
                options.volumes = Some(volume);
            }
            files.create_zfs_file_system(&name, &options).await?
        }
        ZfsCommand::Delete { name } => files.delete_zfs_file_system(&name).await?,
        ZfsCommand::Mount { name, mount_point, fs_type, mode } => {
            let options = MountOptions::default().fs_type(fs_type).mode(mode);
            files.mount_file_system(&name, &mount_point, &options).await?
        }
        ZfsCommand::Unmount { name } => files.unmount_file_system(&name).await?,
        ZfsCommand::List { path, fsname } => {
            let filter = FileSystemFilter { path, fsname };
            files.list_unix_file_systems(&filter).await?
        }
    };
    Ok(response)
}

async fn run_ds<T: Transport>(
    files: &Files<T>,
    command: DsCommand,
) -> anyhow::Result<ZosmfResponse> {
    let response = match command {
        DsCommand::Rename { old, new } => files.rename_dataset(&old, &new).await?,
        DsCommand::RenameMember { dsn, old_member, new_member, enq } => {
            files
                .rename_dataset_member(&dsn, &old_member, &new_member, enq.as_deref())
                .await?
        }
        DsCommand::Create { name, options } => {
            let options = parse_dataset_options(&options)?;
            files.create_data_set(&name, options).await?
        }
        DsCommand::CreateDefault { name, default_type } => {
            files.create_default_data_set(&name, &default_type).await?
        }
        DsCommand::List { pattern, attributes } => files.list_dsn(&pattern, attributes).await?,
        DsCommand::Members { dsn, pattern, start, max_items } => {
            let options = MemberListOptions { pattern, start, max_items };
            files.list_dsn_members(&dsn, &options).await?
        }
        DsCommand::Read { dsn } => files.get_dsn_content(&dsn).await?,
        DsCommand::Write { dsn, data, file } => {
            let data = read_data(data, file).await?;
            files.write_to_dsn(&dsn, &data).await?
        }
        DsCommand::Delete { dsn, volume, member } => {
            files
                .delete_data_set(&dsn, volume.as_deref(), member.as_deref())
                .await?
        }
    };
    Ok(response)
}

fn parse_dataset_options(raw: &str) -> anyhow::Result<DatasetOptions> {
    let map: Map<String, Value> =
        serde_json::from_str(raw).context("--options must be a JSON object")?;
    Ok(DatasetOptions::from_map(map)?)
}

async fn read_data(data: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (data, file) {
        (Some(data), _) => Ok(data),
        (None, Some(file)) => tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Failed to read {}", file.display())),
        (None, None) => anyhow::bail!("Nothing to write: pass --data or --file"),
    }
}
