use super::adapter::{Block, BlockEngine, Workspace};
use super::params::EngineParameters;

/// Stand-in engine that blends the input with a held copy of itself.
///
/// While `freeze` is set the last unfrozen block keeps playing as the wet
/// signal; otherwise wet equals dry. Useful for wiring up hosts and for
/// tests, not as an instrument.
#[derive(Debug, Default)]
pub struct Passthrough {
    held: Option<Block>,
}

impl Passthrough {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockEngine for Passthrough {
    fn init(&mut self, _workspace: &mut Workspace) {
        self.held = None;
    }

    fn process(
        &mut self,
        _workspace: &mut Workspace,
        input: &Block,
        params: EngineParameters,
        output: &mut Block,
    ) {
        if !params.freeze || self.held.is_none() {
            self.held = Some(*input);
        }
        let wet = self.held.as_ref().unwrap_or(input);
        let mix = params.dry_wet.clamp(0.0, 1.0);

        for ((o, dry), wet) in output.iter_mut().zip(input).zip(wet) {
            o.l = blend(dry.l, wet.l, mix);
            o.r = blend(dry.r, wet.r, mix);
        }
    }
}

#[inline]
fn blend(dry: i16, wet: i16, mix: f32) -> i16 {
    (dry as f32 * (1.0 - mix) + wet as f32 * mix).round() as i16
}
