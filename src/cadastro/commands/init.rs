use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let created = store.ensure_initialized()?;
    let location = store.location();

    let mut result = CmdResult {
        data_file: Some(location.clone()),
        ..CmdResult::default()
    };
    if created {
        result.add_message(CmdMessage::success(format!(
            "Initialized data file at {}",
            location.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Data file already exists at {}",
            location.display()
        )));
    }
    Ok(result)
}
