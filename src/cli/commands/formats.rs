// `--list-formats`: print the allow-list with a short description each.

use crate::formats::AVAILABLE_FORMATS;

pub fn execute_list_formats() {
    println!("The available formats are:");
    for (index, (id, description)) in AVAILABLE_FORMATS.iter().enumerate() {
        println!("\t{}. '{}': {}", index + 1, id, description);
    }
}
