//! Integration tests driving a small frame-processing pipeline.

use pretty_assertions::assert_eq;
use stagechain::prelude::*;
use stagechain::testing::{assert_invalid_state, RecordingStage};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    width: usize,
    pixels: Vec<u8>,
}

impl Frame {
    fn new(width: usize, pixels: Vec<u8>) -> Self {
        Self { width, pixels }
    }
}

#[derive(Debug, Default)]
struct Invert {
    output: OutputSlot<Frame>,
}

impl Stage<Frame> for Invert {
    fn push(&mut self, input: &Frame) -> Result<()> {
        let pixels = input.pixels.iter().map(|p| 255 - p).collect();
        self.output.set(Frame::new(input.width, pixels));
        Ok(())
    }

    fn front(&self) -> Result<&Frame> {
        self.output.get("Invert")
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        "Invert".to_string()
    }
}

#[derive(Debug)]
struct Threshold {
    level: u8,
    output: OutputSlot<Frame>,
}

impl Threshold {
    fn new(level: u8) -> Self {
        Self {
            level,
            output: OutputSlot::new(),
        }
    }
}

impl Stage<Frame> for Threshold {
    fn push(&mut self, input: &Frame) -> Result<()> {
        if input.width == 0 || input.pixels.len() % input.width != 0 {
            return Err(PipelineError::invalid_input(
                self.describe(),
                "pixel count is not a multiple of the width",
            ));
        }
        let pixels = input
            .pixels
            .iter()
            .map(|&p| if p >= self.level { 255 } else { 0 })
            .collect();
        self.output.set(Frame::new(input.width, pixels));
        Ok(())
    }

    fn front(&self) -> Result<&Frame> {
        self.output.get("Threshold")
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        format!("Threshold({})", self.level)
    }
}

/// Emits only every second frame it receives.
#[derive(Debug, Default)]
struct Decimate {
    seen: usize,
    output: OutputSlot<Frame>,
}

impl Stage<Frame> for Decimate {
    fn push(&mut self, input: &Frame) -> Result<()> {
        self.seen += 1;
        if self.seen % 2 == 0 {
            self.output.set(input.clone());
        } else {
            self.output.clear();
        }
        Ok(())
    }

    fn front(&self) -> Result<&Frame> {
        self.output.get("Decimate")
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        "Decimate".to_string()
    }
}

#[test]
fn invert_then_threshold() -> anyhow::Result<()> {
    let mut seq = Sequence::<Frame>::new()
        .then(Box::new(Invert::default()))
        .then(Box::new(Threshold::new(128)));

    seq.push(&Frame::new(2, vec![0, 200, 127, 128]))?;

    assert_eq!(seq.front()?, &Frame::new(2, vec![255, 0, 255, 0]));
    assert_eq!(seq.describe(), "(Invert (Threshold(128)))");
    Ok(())
}

#[test]
fn decimating_terminal_stage_alternates_emptiness() -> anyhow::Result<()> {
    let mut seq = Sequence::<Frame>::new()
        .then(Box::new(Invert::default()))
        .then(Box::new(Decimate::default()));

    let frame = Frame::new(1, vec![10]);

    seq.push(&frame)?;
    assert!(seq.is_empty()?);
    assert_invalid_state(&seq.front());

    seq.push(&frame)?;
    assert!(!seq.is_empty()?);
    assert_eq!(seq.front()?.pixels, vec![245]);
    Ok(())
}

#[test]
fn decimating_intermediate_stage_aborts_run() {
    let tail = RecordingStage::<Frame>::new("Tail");
    let tail_log = tail.handle();
    let mut seq = Sequence::<Frame>::new()
        .then(Box::new(Decimate::default()))
        .then(Box::new(tail));

    let frame = Frame::new(1, vec![1]);
    assert_invalid_state(&seq.push(&frame));
    assert_eq!(tail_log.push_count(), 0);

    // The decimator has now seen one frame, so the next push goes through.
    seq.push(&frame).unwrap();
    assert_eq!(tail_log.inputs(), vec![frame]);
}

#[test]
fn rejected_input_surfaces_from_stage() {
    let mut seq = Sequence::<Frame>::new()
        .then(Box::new(Invert::default()))
        .then(Box::new(Threshold::new(10)));

    let err = seq.push(&Frame::new(3, vec![1, 2])).unwrap_err();
    assert_eq!(
        err,
        PipelineError::invalid_input(
            "Threshold(10)",
            "pixel count is not a multiple of the width"
        )
    );
    // Invert already consumed the frame.
    assert!(!seq.iter().next().unwrap().is_empty());
}

#[test]
fn configured_sequence_from_json() -> anyhow::Result<()> {
    let config = SequenceConfig::from_json(r#"{"name": "edges", "empty_marker": "<none>"}"#)?;
    let mut seq: Sequence<Frame> = Sequence::with_config(config);

    assert_eq!(seq.describe(), "<none>");
    assert_eq!(seq.config().name.as_deref(), Some("edges"));

    seq.append(Box::new(Invert::default()));
    seq.push(&Frame::new(1, vec![0]))?;
    assert_eq!(seq.front()?.pixels, vec![255]);
    Ok(())
}
