//! Walks through the owning-handle patterns with safe owners.
//!
//! Run with: RUST_LOG=debug cargo run --example owner-print

use owner::{AutoRelease, Owner, OwnerOptions, Tracker};

fn make_message_owner(tracker: &Tracker) -> owner::Result<Owner<Tracker>> {
    Owner::from_bytes_in(b"Some message", OwnerOptions::default(), tracker.clone())
}

fn main() -> owner::Result<()> {
    env_logger::init();

    let tracker = Tracker::new();

    println!("--- Destructor on scope exit ---");
    {
        let mut a = Owner::new_in(OwnerOptions::default(), tracker.clone())?;
        let b = a.transfer();
        println!("b owns {}", b.id().map(|id| id.to_string()).unwrap_or_default());
    }

    println!("\n--- Manual destruct, then scope exit ---");
    {
        let mut a = Owner::new_in(OwnerOptions::default(), tracker.clone())?;
        let mut b = a.transfer();
        println!("b owns {}", b.id().map(|id| id.to_string()).unwrap_or_default());
        b.release();
    }

    println!("\n--- Two explicit destructor calls ---");
    {
        let mut a = Owner::new_in(OwnerOptions::default(), tracker.clone())?;
        let mut b = a.transfer();
        a.release();
        b.release();
    }

    println!("\n--- Auto-release wrapper ---");
    {
        let a = AutoRelease::create_in(OwnerOptions::default(), tracker.clone())?;
        let b = a.try_clone()?;
        println!("a owns {}, b owns a copy at {}", fmt_id(&a), fmt_id(&b));
    }

    println!("\n--- Returned owner ---");
    {
        let a = AutoRelease::new(make_message_owner(&tracker)?);
        let b = a.into_inner();
        println!("b owns `{}`", String::from_utf8_lossy(b.message()?));
    }

    let stats = tracker.stats();
    println!(
        "\n{} allocation(s), {} release(s), {} double release(s)",
        stats.allocations, stats.releases, stats.double_releases
    );
    tracker.check()?;

    println!("Hello, World!");
    Ok(())
}

fn fmt_id(o: &Owner<Tracker>) -> String {
    o.id().map(|id| id.to_string()).unwrap_or_else(|| "nothing".to_string())
}
