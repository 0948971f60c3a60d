use pixel_strand::PixelSink;

/// Sink recording every frame it receives
#[derive(Debug)]
pub struct RecordingSink<C> {
    pub frames: Vec<Vec<C>>,
}

impl<C> Default for RecordingSink<C> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

#[allow(dead_code)]
impl<C> RecordingSink<C> {
    pub fn last(&self) -> &[C] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<C: Clone> PixelSink<C> for RecordingSink<C> {
    fn set(&mut self, colors: &[C]) {
        self.frames.push(colors.to_vec());
    }
}
