//! Date picker calendar CLI.
//!
//! # Usage
//! ```ignore
//! calnav                                   // Current month, today focused
//! calnav --start-at 2017-01-31 -k left     // Focus moves to January 30
//! calnav -y -k right,enter                 // Year view, enter February
//! calnav -f even -k day:2                  // Select the 2nd if it is allowed
//! ```

use log::{debug, info};

use calnav::args::{Args, Settings};
use calnav::calendar::Calendar;
use calnav::error::CalNavError;
use calnav::formatter::print_calendar;
use calnav::types::CalendarEvent;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calnav: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalNavError> {
    let settings = Settings::new(args)?;
    debug!("{:?}", settings.config);
    let mut calendar = Calendar::new(settings.config);

    for command in settings.script {
        match calendar.apply(command) {
            Some(CalendarEvent::SelectedChange(date)) => println!("selected-change: {}", date),
            Some(CalendarEvent::MonthEntered(date)) => info!("entered {}", date),
            None => {}
        }
    }

    print_calendar(&calendar, settings.color);
    match calendar.selected() {
        Some(date) => println!("selected: {}", date),
        None => println!("selected: none"),
    }

    Ok(())
}
