pub mod validator;

pub use validator::{ScheduleValidator, TRAIN_ID_LEN};
