use crate::core::system_info::provider::MetricsProvider;
use crate::core::system_info::types::*;
use crate::core::system_info::{session, temperature, uptime};
use crate::error::Result;
use log::{debug, warn};
use std::fmt::Display;
use std::io::Write;

/// Collect every metric for one run.
///
/// Host identity (OS, user, host name) is mandatory and its failure is
/// returned. Everything else degrades to `None`; network lookups run only when
/// requested and describe their failure on `diagnostics`.
pub fn collect_snapshot<P, W>(
    provider: &P,
    options: &FetchOptions,
    now: i64,
    diagnostics: &mut W,
) -> Result<FetchSnapshot>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
{
    let os = provider.os_identity()?;
    let user = UserHost {
        username: provider.username()?,
        hostname: provider.hostname()?,
    };

    let uptime = uptime::uptime_since(provider.boot_time(), now);
    let session = session::resolve(|name| provider.env_var(name));
    let cpu = provider.cpu();

    let cpu_temperature = temperature::pick_cpu_temperature(&provider.temperature_sensors());
    if cpu_temperature.is_none() {
        debug!("No known CPU temperature sensor found");
    }

    let battery = provider.battery().unwrap_or_else(|e| {
        debug!("Battery status unavailable: {}", e);
        None
    });

    let memory = provider.memory();

    let disk = provider.root_volume();
    if disk.is_none() {
        warn!("No storage volume found");
    }

    let private_ip = if options.show_private_ip {
        match provider.private_ip() {
            Ok(ip) => Some(ip),
            Err(e) => {
                report(&mut *diagnostics, "private IP address", &e);
                None
            }
        }
    } else {
        None
    };

    let public_ip = if options.show_public_ip {
        match provider.public_ip() {
            Ok(ip) => Some(ip),
            Err(e) => {
                report(&mut *diagnostics, "public IP address", &e);
                None
            }
        }
    } else {
        None
    };

    Ok(FetchSnapshot {
        os,
        user,
        uptime,
        session,
        cpu,
        cpu_temperature,
        battery,
        memory,
        disk,
        private_ip,
        public_ip,
    })
}

fn report<W: Write + ?Sized>(diagnostics: &mut W, what: &str, err: &dyn Display) {
    debug!("Failed to resolve {}: {}", what, err);
    if let Err(e) = writeln!(diagnostics, "Error retrieving {}: {}", what, err) {
        debug!("Cannot write diagnostic: {}", e);
    }
}
