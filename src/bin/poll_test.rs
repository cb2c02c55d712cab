use rusty_poll::api::{ResetResponse, VoteResponse};
use rusty_poll::error::PollError;
use rusty_poll::poll::Poll;
use rusty_poll::view::{PollView, Screen, percentages};

// Helper function to read every counter in display order
fn counts(poll: &Poll) -> Vec<u64> {
    poll.options().iter().map(|option| option.votes).collect()
}

// Test the seeded poll
fn test_poll_seed() {
    println!("\n====== Testing Poll::seeded ======");
    let poll = Poll::seeded("secret123");

    assert!(!poll.question().is_empty());
    assert_eq!(poll.options().len(), 4);
    assert_eq!(counts(&poll), vec![0, 0, 0, 0]);
    println!("✓ Poll seeded with {} options, all at zero", poll.options().len());
}

fn test_poll_vote() {
    println!("\n====== Testing Poll::vote ======");
    let mut poll = Poll::seeded("secret123");

    poll.vote(false, "b").unwrap();
    assert_eq!(counts(&poll), vec![0, 1, 0, 0]);
    println!("✓ Vote for 'b' counted once");

    let result = poll.vote(true, "b");
    assert_eq!(result, Err(PollError::AlreadyVoted));
    assert_eq!(counts(&poll), vec![0, 1, 0, 0]);
    println!("✓ Repeat vote rejected");

    let result = poll.vote(false, "x");
    assert_eq!(result, Err(PollError::OptionNotFound("x".to_string())));
    assert_eq!(counts(&poll), vec![0, 1, 0, 0]);
    println!("✓ Unknown option 'x' rejected");
}

fn test_poll_reset() {
    println!("\n====== Testing Poll::reset ======");
    let mut poll = Poll::seeded("secret123");
    poll.vote(false, "a").unwrap();
    poll.vote(false, "c").unwrap();

    assert_eq!(poll.reset("wrong"), Err(PollError::Unauthorized));
    assert_eq!(counts(&poll), vec![1, 0, 1, 0]);
    println!("✓ Reset with wrong token rejected, counts kept");

    poll.reset("secret123").unwrap();
    assert_eq!(counts(&poll), vec![0, 0, 0, 0]);
    println!("✓ Reset with admin token cleared all counts");
}

fn test_view_flow() {
    println!("\n====== Testing PollView ======");
    let mut poll = Poll::seeded("secret123");
    let mut view = PollView::from_snapshot(poll.snapshot(false));
    assert_eq!(view.screen(), Screen::Voting);
    println!("✓ Fresh client starts on the voting screen");

    let options = poll.vote(false, "a").unwrap().to_vec();
    view.vote_succeeded(VoteResponse {
        success: true,
        options,
    });
    assert_eq!(view.screen(), Screen::Results);
    assert_eq!(view.results()[0].percentage, 100);
    println!("✓ Client shows results at 100% after its vote");

    let options = poll.reset("secret123").unwrap().to_vec();
    let _clear = view.reset_succeeded(ResetResponse {
        success: true,
        message: "Poll has been reset".to_string(),
        options,
    });
    assert_eq!(view.screen(), Screen::Voting);
    assert!(!view.has_voted());
    println!("✓ Client back on voting screen after reset");
}

fn test_percentages() {
    println!("\n====== Testing percentages ======");
    let mut poll = Poll::seeded("secret123");
    assert_eq!(percentages(poll.options()), vec![0, 0, 0, 0]);
    println!("✓ No votes gives 0% everywhere");

    for id in ["a", "a", "a", "b"] {
        poll.vote(false, id).unwrap();
    }
    assert_eq!(percentages(poll.options()), vec![75, 25, 0, 0]);
    println!("✓ Votes [3,1,0,0] give [75,25,0,0]");
}

pub fn run_tests() {
    println!("Starting poll unit tests");
    test_poll_seed();
    test_poll_vote();
    test_poll_reset();
    test_view_flow();
    test_percentages();
    println!("All tests passed!");
}

fn main() {
    run_tests();
}
