
/// Events emitted by the frame loop that renderers can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// Frame loop started
    Started,

    /// A frame was advanced; carries the frame number
    Frame(u64),

    /// Frame loop finished
    Completed,
}
