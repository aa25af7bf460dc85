/// Work the event handler asks the main loop to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    IndexDefault,
    UploadAndIndex { path: String },
    Ask { question: String },
    Quit,
}
