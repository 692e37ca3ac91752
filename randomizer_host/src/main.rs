mod midi;

use anyhow::{anyhow, bail, Result};
use midi::MidirTransport;
use randomizer_engine::{MidiTransport, Randomizer};
use randomizer_shared::params::{self, ParamGroup};
use randomizer_shared::settings::DEFAULT_SETTINGS_FILE;

fn usage() {
    eprintln!("DeepMind 12 NRPN randomizer");
    eprintln!();
    eprintln!("Usage: randomizer_host [--device NAME] COMMAND");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  ports                   list MIDI output ports");
    eprintln!("  params [GROUP]          show parameters, ranges and skip flags");
    eprintln!("  randomize [GROUP ...]   randomize everything, or only the named groups");
    eprintln!("  set-range ID MIN MAX    set a parameter's randomization range");
    eprintln!("  skip ID                 exclude a parameter from randomization");
    eprintln!("  unskip ID               include a parameter again");
    eprintln!("  save-defaults           persist current state to {}", DEFAULT_SETTINGS_FILE);
    eprintln!("  clear-defaults          reset to built-in defaults and delete the file");
    eprintln!();
    eprintln!(
        "Groups: {}",
        ParamGroup::iter()
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Pull out --device NAME, keep the rest as the command line.
    let mut device_override: Option<String> = None;
    let mut rest: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--device" {
            i += 1;
            let name = args
                .get(i)
                .cloned()
                .ok_or_else(|| anyhow!("--device needs a value"))?;
            device_override = Some(name);
        } else {
            rest.push(args[i].clone());
        }
        i += 1;
    }

    let mut engine = Randomizer::new();
    match engine.load_settings() {
        Ok(true) => eprintln!("[Host] Loaded defaults from {}", DEFAULT_SETTINGS_FILE),
        Ok(false) => {}
        Err(e) => eprintln!("[Host] {} (using built-in defaults)", e),
    }
    if let Some(name) = device_override {
        engine.set_device_name(name);
    }

    match rest.first().map(String::as_str) {
        Some("ports") => cmd_ports(),
        Some("params") => cmd_params(&engine, rest.get(1).map(String::as_str)),
        Some("randomize") => cmd_randomize(&engine, &rest[1..]),
        Some("set-range") => cmd_set_range(&mut engine, &rest[1..]),
        Some("skip") => cmd_set_skip(&mut engine, &rest[1..], true),
        Some("unskip") => cmd_set_skip(&mut engine, &rest[1..], false),
        Some("save-defaults") => {
            engine.save_settings()?;
            eprintln!("[Host] Saved defaults to {}", DEFAULT_SETTINGS_FILE);
            Ok(())
        }
        Some("clear-defaults") => {
            engine.clear_settings()?;
            eprintln!("[Host] Cleared defaults");
            Ok(())
        }
        _ => {
            usage();
            Ok(())
        }
    }
}

fn cmd_ports() -> Result<()> {
    let transport = MidirTransport::new();
    let ports = transport.list_output_destinations();
    if ports.is_empty() {
        eprintln!("[Host] No MIDI output ports found");
        return Ok(());
    }
    for name in ports {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_params(engine: &Randomizer, group_name: Option<&str>) -> Result<()> {
    let groups: Vec<ParamGroup> = match group_name {
        Some(name) => vec![parse_group(name)?],
        None => ParamGroup::iter().collect(),
    };
    for group in groups {
        println!("{}", group.name());
        for &id in group.member_ids() {
            let Some(info) = params::lookup(id) else { continue };
            let Some(range) = engine.get_range(id) else { continue };
            let flag = if engine.is_included(id) { " " } else { "skip" };
            println!(
                "  {:>3}  {:<22} {:>5}..={:<5} {}",
                id, info.name, range.min, range.max, flag
            );
        }
    }
    Ok(())
}

fn cmd_randomize(engine: &Randomizer, group_names: &[String]) -> Result<()> {
    let targets: Option<Vec<u16>> = if group_names.is_empty() {
        None
    } else {
        let mut ids: Vec<u16> = Vec::new();
        for name in group_names {
            ids.extend_from_slice(parse_group(name)?.member_ids());
        }
        ids.sort_unstable();
        ids.dedup();
        Some(ids)
    };

    let mut transport = MidirTransport::new();
    let report = engine.randomize(targets.as_deref(), &mut transport);

    if let Some(e) = report.aborted {
        bail!("{}", e);
    }
    eprintln!("[Host] Randomized {} parameters", report.sent);
    for (id, e) in &report.failures {
        let name = params::lookup(*id).map(|p| p.name).unwrap_or("?");
        eprintln!("[Host]   failed {} ({}): {}", id, name, e);
    }
    if !report.failures.is_empty() {
        bail!("{} parameters failed", report.failures.len());
    }
    Ok(())
}

fn cmd_set_range(engine: &mut Randomizer, args: &[String]) -> Result<()> {
    let [id, min, max] = args else {
        bail!("usage: set-range ID MIN MAX");
    };
    let id: u16 = id.parse()?;
    let min: i32 = min.parse()?;
    let max: i32 = max.parse()?;
    let stored = engine
        .set_range(id, min, max)
        .ok_or_else(|| anyhow!("unknown parameter id {}", id))?;
    engine.save_settings()?;
    eprintln!(
        "[Host] Parameter {} range set to {}..={}",
        id, stored.min, stored.max
    );
    if stored.is_empty() {
        eprintln!("[Host]   warning: empty range, parameter will be skipped");
    }
    Ok(())
}

fn cmd_set_skip(engine: &mut Randomizer, args: &[String], skip: bool) -> Result<()> {
    let [id] = args else {
        bail!("usage: {} ID", if skip { "skip" } else { "unskip" });
    };
    let id: u16 = id.parse()?;
    if !engine.set_included(id, !skip) {
        bail!("unknown parameter id {}", id);
    }
    engine.save_settings()?;
    eprintln!(
        "[Host] Parameter {} {}",
        id,
        if skip { "skipped" } else { "included" }
    );
    Ok(())
}

fn parse_group(name: &str) -> Result<ParamGroup> {
    ParamGroup::from_name(name).ok_or_else(|| anyhow!("unknown group '{}'", name))
}
