use log::debug;

use super::params::{EngineParameters, EngineSettings};
use crate::{dsp::frame::ShortFrame, ENGINE_BLOCK_SIZE};

/// Size of the general-purpose engine arena in bytes.
pub const WORKSPACE_LEN: usize = 118_784;
/// Size of the fast (cache-resident) engine arena in bytes.
pub const FAST_WORKSPACE_LEN: usize = 65_536 - 128;

pub type Block = [ShortFrame; ENGINE_BLOCK_SIZE];

/// The two memory regions a block engine works out of.
///
/// Allocated once, zeroed, and never resized.
pub struct Workspace {
    memory: Box<[u8]>,
    fast: Box<[u8]>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_sizes(WORKSPACE_LEN, FAST_WORKSPACE_LEN)
    }

    pub fn with_sizes(memory_len: usize, fast_len: usize) -> Self {
        Self {
            memory: vec![0u8; memory_len].into_boxed_slice(),
            fast: vec![0u8; fast_len].into_boxed_slice(),
        }
    }

    pub fn memory(&mut self) -> &mut [u8] {
        &mut self.memory
    }

    pub fn fast(&mut self) -> &mut [u8] {
        &mut self.fast
    }

    /// Both arenas at once, for engines that split state across them.
    pub fn split(&mut self) -> (&mut [u8], &mut [u8]) {
        (&mut self.memory, &mut self.fast)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed-rate engine that turns one block of input into one block of
/// output.
///
/// Implementations keep their per-voice state in the [`Workspace`] handed
/// to every call.
pub trait BlockEngine: Send {
    /// Called once with freshly zeroed arenas.
    fn init(&mut self, workspace: &mut Workspace);

    /// Called before every block.
    fn prepare(&mut self, _settings: &EngineSettings, _workspace: &mut Workspace) {
        // Default: nothing to reconfigure
    }

    fn process(
        &mut self,
        workspace: &mut Workspace,
        input: &Block,
        params: EngineParameters,
        output: &mut Block,
    );
}

impl BlockEngine for Box<dyn BlockEngine> {
    fn init(&mut self, workspace: &mut Workspace) {
        (**self).init(workspace)
    }

    fn prepare(&mut self, settings: &EngineSettings, workspace: &mut Workspace) {
        (**self).prepare(settings, workspace)
    }

    fn process(
        &mut self,
        workspace: &mut Workspace,
        input: &Block,
        params: EngineParameters,
        output: &mut Block,
    ) {
        (**self).process(workspace, input, params, output)
    }
}

/// Owns an engine together with its arenas and settings.
pub struct EngineAdapter<E: BlockEngine> {
    engine: E,
    workspace: Workspace,
    settings: EngineSettings,
    blocks: u64,
}

impl<E: BlockEngine> EngineAdapter<E> {
    pub fn new(engine: E) -> Self {
        Self::with_workspace(engine, Workspace::new())
    }

    pub fn with_workspace(mut engine: E, mut workspace: Workspace) -> Self {
        debug!(
            "initialising block engine: {} byte arena, {} byte fast arena",
            workspace.memory.len(),
            workspace.fast.len()
        );
        engine.init(&mut workspace);
        Self {
            engine,
            workspace,
            settings: EngineSettings::default(),
            blocks: 0,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EngineSettings {
        &mut self.settings
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Number of blocks processed since construction.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Run exactly one block through the engine.
    pub fn process(&mut self, input: &Block, params: EngineParameters) -> Block {
        let mut output = [ShortFrame::default(); ENGINE_BLOCK_SIZE];
        self.engine.prepare(&self.settings, &mut self.workspace);
        self.engine
            .process(&mut self.workspace, input, params, &mut output);
        self.blocks += 1;
        output
    }
}
