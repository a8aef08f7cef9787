#![deny(warnings)]

use brew_core::DEFAULT_SAVE_SLOT;
use persistence::{default_save_dir, load_state, FileStore, Loaded};

fn main() -> anyhow::Result<()> {
    let mut dir = default_save_dir().to_string();
    let mut slot = DEFAULT_SAVE_SLOT.to_string();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--dir" => dir = it.next().unwrap_or(dir),
            "--slot" => slot = it.next().unwrap_or(slot),
            _ => {}
        }
    }

    let store = FileStore::new(&dir);
    match load_state(&store, &slot)? {
        Loaded::Restored(state) => println!(
            "Save OK at {} | day: {} | gold: {} | potions held: {} | plots: {}/{}",
            store.slot_path(&slot).display(),
            state.days_passed,
            state.gold,
            state.inventory.potions.total_units(),
            state.garden.unlocked,
            state.garden.total_plots()
        ),
        Loaded::Missing => println!("No save in slot {slot} under {dir}"),
        Loaded::Corrupt(e) => {
            println!("Save in slot {slot} is unusable: {e}");
            std::process::exit(2);
        }
    }
    Ok(())
}
