use crate::version::Channel;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_warning(message: &str) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", message); // Yellow color
}

/// Print the resolved version and which channel produced it.
pub fn display_version_banner(channel: Channel, version: &str, target_version: &str) {
    println!("Version: {}", version);
    if channel.is_development() {
        println!("This is a DEV version");
        println!("Target: {}\n", target_version);
    } else {
        println!("!!!>>> This is a RELEASE version <<<!!!\n");
    }
}

pub fn display_download_location(location: &str) {
    println!("Download location: {}", location);
}
