use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    HistoryNext,
    HistoryPrevious,
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardPaste(String),
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
