use anyhow::Result;
use std::sync::mpsc;
use std::sync::OnceLock;
use std::time::Duration;

// Clipboard operations run on one dedicated thread, initialized on first use.
static CLIPBOARD_SENDER: OnceLock<mpsc::Sender<String>> = OnceLock::new();

/// Queue text for the clipboard thread and return immediately.
///
/// The thread keeps each `arboard::Clipboard` instance alive for a couple of
/// seconds after setting the text; Linux clipboard managers read the contents
/// asynchronously and lose them if the instance drops too early.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sender = CLIPBOARD_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<String>();
        std::thread::spawn(move || {
            use arboard::Clipboard;

            for text in rx {
                if let Ok(mut clipboard) = Clipboard::new() {
                    if clipboard.set_text(&text).is_ok() {
                        std::thread::sleep(Duration::from_secs(2));
                    }
                }
            }
        });
        tx
    });

    sender
        .send(text.to_string())
        .map_err(|_| anyhow::anyhow!("Clipboard manager channel closed"))?;
    Ok(())
}
