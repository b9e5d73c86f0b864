/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! `p4rtd`: serves an emulated P4Runtime target, and offers the WBB encoder
//! and the P4RT node resolver on the command line.

use anyhow::{Context, Result};

use clap::{Parser, Subcommand};

use p4rt::device::forwarding_pipeline_config;
use p4rt::nodes::{assign_device_ids, p4rt_nodes_for_all_ports, StaticTelemetry};
use p4rt::schema::{load_p4info, Switch};
use p4rt::wbb::{AclWbbEncoder, AclWbbIngressEntry, WbbSchema, PIPELINE_COOKIE};
use p4rt::TargetConfig;

use signal_hook::{consts::signal::*, iterator::Signals};

use std::convert::TryFrom;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::info;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve an emulated P4Runtime target until SIGINT or SIGTERM.
    Serve {
        /// Target configuration (JSON).  Defaults to one generic device.
        #[clap(long)]
        config: Option<PathBuf>,

        /// P4Runtime bind address.
        #[clap(long, default_value = "127.0.0.1")]
        addr: String,

        /// P4Runtime listening port.
        #[clap(long, default_value_t = 9559)]
        port: u16,

        /// Binary P4Info to commit on every device before serving.
        #[clap(long)]
        p4info: Option<PathBuf>,
    },

    /// Print the updates for the WBB entries in a JSON file.
    Encode {
        entries: PathBuf,

        /// Take the WBB IDs from this binary P4Info instead of the defaults.
        #[clap(long)]
        p4info: Option<PathBuf>,
    },

    /// Print the P4RT node of each port, and the device ID of each node.
    Nodes {
        /// Static telemetry (JSON).
        #[clap(long)]
        config: PathBuf,

        #[clap(long, default_value_t = 0)]
        seed: u64,
    },

    /// List the tables in a binary P4Info.
    Tables { p4info: PathBuf },
}

fn load_switch(path: &Path) -> Result<Switch> {
    let p4info = load_p4info(path)?;
    Switch::try_from(&p4info).with_context(|| format!("{}: invalid P4Info", path.display()))
}

fn serve(config: Option<PathBuf>, addr: &str, port: u16, p4info: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => TargetConfig::load(path)?,
        None => TargetConfig::default(),
    };
    let mut target = config.build();
    if let Some(path) = p4info {
        let p4info = load_p4info(&path)?;
        target
            .install_pipeline(&forwarding_pipeline_config(p4info, PIPELINE_COOKIE))
            .with_context(|| format!("{}: could not install pipeline", path.display()))?;
    }

    let target = Arc::new(Mutex::new(target));
    let (mut server, port) = p4rt::service::serve(target, addr, port)?;
    info!("Listening on {}:{}", addr, port);

    let mut signals = Signals::new(&[SIGINT, SIGTERM])?;
    if let Some(signal) = signals.forever().next() {
        info!("received signal {}, shutting down", signal);
    }
    futures::executor::block_on(server.shutdown())?;
    Ok(())
}

fn encode(entries: &Path, p4info: Option<PathBuf>) -> Result<()> {
    let schema = match p4info {
        Some(path) => WbbSchema::from_switch(&load_switch(&path)?)?,
        None => WbbSchema::default(),
    };
    let text = fs::read_to_string(entries)
        .with_context(|| format!("{}: could not read entries", entries.display()))?;
    let entries: Vec<AclWbbIngressEntry> = serde_json::from_str(&text)
        .with_context(|| format!("{}: could not parse entries", entries.display()))?;
    for update in AclWbbEncoder::new(schema).updates(&entries) {
        println!("{}", protobuf::text_format::print_to_string(&update));
    }
    Ok(())
}

fn nodes(config: &Path, seed: u64) -> Result<()> {
    let text = fs::read_to_string(config)
        .with_context(|| format!("{}: could not read telemetry", config.display()))?;
    let telemetry: StaticTelemetry = serde_json::from_str(&text)
        .with_context(|| format!("{}: could not parse telemetry", config.display()))?;
    let nodes = p4rt_nodes_for_all_ports(&telemetry);
    for (port, node) in &nodes {
        println!("{} {}", port, node);
    }
    for (node, id) in assign_device_ids(nodes.values(), seed) {
        println!("{} device_id={}", node, id);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match Args::parse().command {
        Command::Serve {
            config,
            addr,
            port,
            p4info,
        } => serve(config, &addr, port, p4info),
        Command::Encode { entries, p4info } => encode(&entries, p4info),
        Command::Nodes { config, seed } => nodes(&config, seed),
        Command::Tables { p4info } => {
            for table in load_switch(&p4info)?.tables {
                println!("{}", table);
            }
            Ok(())
        }
    }
}
