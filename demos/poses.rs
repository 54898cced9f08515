//! Prints the letter recognized for every combination of extended fingers, then feeds a short,
//! flickering frame sequence through a [`Debounce`] filter.
//!
//! Run with `RUST_LOG=hindam=trace` to see the per-finger states.

use hindam::alphabet::Letter;
use hindam::filter::{Debounce, Filter};
use hindam::hand::finger::{Finger, HandPose};
use hindam::hand::landmark::HandLandmarks;
use hindam::landmark::{Landmark, Landmarks};
use hindam::recognizer::Recognizer;

fn main() -> anyhow::Result<()> {
    hindam::init_logger!();

    let recognizer = Recognizer::new();
    for pose in HandPose::all() {
        let hand = HandLandmarks::new(&synthesize(pose))?;
        let letter = recognizer.classify_hand(&hand);

        let fingers = Finger::ALL
            .map(|finger| if pose.is_extended(finger) { '|' } else { '.' })
            .iter()
            .collect::<String>();
        match letter {
            Some(letter) => println!("{fingers}  {letter}"),
            None => println!("{fingers}  -"),
        }
    }

    println!();
    let two = synthesize(HandPose::new(false, true, true, false, false));
    let fist = synthesize(HandPose::default());
    let frames = [&two, &two, &fist, &two, &fist, &fist, &fist];
    let mut debounce = Debounce::new(3);
    for (i, hand) in frames.into_iter().enumerate() {
        let hands = std::slice::from_ref(hand);
        let raw = recognizer.recognize(hands);
        let stable = debounce.push(raw);
        println!(
            "frame {i}: raw {}  stable {}",
            raw.map_or("-", Letter::as_str),
            stable.map_or("-", Letter::as_str),
        );
    }

    Ok(())
}

/// Places the landmarks of an upright hand, curling the fingers that aren't extended in `pose`.
fn synthesize(pose: HandPose) -> Landmarks {
    let mut lms = Landmarks::new(HandLandmarks::NUM_LANDMARKS);
    lms.set(0, Landmark::new([0.5, 0.9, 0.0]));
    for (i, finger) in Finger::ALL.into_iter().enumerate() {
        let x = 0.3 + 0.1 * i as f32;
        let base = 1 + 4 * i;
        let joint_ys = if pose.is_extended(finger) {
            [0.7, 0.6, 0.5, 0.4]
        } else {
            [0.7, 0.6, 0.65, 0.7]
        };
        for (offset, y) in joint_ys.into_iter().enumerate() {
            lms.set(base + offset, Landmark::new([x, y, 0.0]));
        }
    }
    lms
}
