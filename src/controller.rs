//! Command dispatch loop

use tracing::{info, warn};
use crate::console::Console;
use crate::repository::VoucherRepository;
use crate::service::{Clock, VoucherService};
use crate::view::ConsoleView;
use crate::{Result, VoucherError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Create,
    List,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Exit, Command::Create, Command::List];

    pub fn label(&self) -> &'static str {
        match self { Self::Exit => "나가기", Self::Create => "생성", Self::List => "조회" }
    }

    pub fn from(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| VoucherError::InvalidCommand(label.to_string()))
    }
}

pub struct VoucherController<C, R, K> {
    view: ConsoleView<C>,
    service: VoucherService<R, K>,
}

impl<C: Console, R: VoucherRepository, K: Clock> VoucherController<C, R, K> {
    pub fn new(view: ConsoleView<C>, service: VoucherService<R, K>) -> Self { Self { view, service } }

    /// Runs until the exit command or end of input. Only console I/O failures escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let command = match self.view.select_command() {
                Ok(command) => command,
                Err(e) => {
                    self.recover(e)?;
                    continue;
                }
            };
            match command {
                Command::Exit => {
                    self.view.exit()?;
                    info!("exit requested");
                    return Ok(());
                }
                Command::Create => self.create()?,
                Command::List => self.list()?,
            }
        }
    }

    fn create(&mut self) -> Result<()> {
        let created = self
            .view
            .create_voucher_creation_request_from_input()
            .and_then(|request| self.service.create(request));
        match created {
            Ok(response) => self.view.print_created_voucher(&response),
            Err(e) => self.recover(e),
        }
    }

    fn list(&mut self) -> Result<()> {
        let responses = self.service.list();
        self.view.list_vouchers(&responses)
    }

    fn recover(&mut self, error: VoucherError) -> Result<()> {
        if !error.is_invalid_argument() {
            return Err(error);
        }
        warn!(%error, "input rejected");
        self.view.print_error_message(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use crate::config::ListFormat;
    use crate::console::ScriptedConsole;
    use crate::domain::VoucherType;
    use crate::repository::InMemoryVoucherRepository;
    use crate::service::FixedClock;

    type TestController = VoucherController<ScriptedConsole, InMemoryVoucherRepository, FixedClock>;

    fn output(app: &TestController) -> &str { &app.view.console().output }

    fn controller(inputs: Vec<&'static str>, list_format: ListFormat) -> TestController {
        let now = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        VoucherController::new(
            ConsoleView::new(ScriptedConsole::new(inputs), list_format),
            VoucherService::new(InMemoryVoucherRepository::new(), FixedClock(now)),
        )
    }

    #[test]
    fn test_command_labels() {
        for c in Command::ALL { assert_eq!(Command::from(c.label()).unwrap(), c); }
        assert!(matches!(Command::from("삭제"), Err(VoucherError::InvalidCommand(_))));
    }

    #[test]
    fn test_create_then_list() {
        let mut app = controller(vec!["생성", "정액 할인", "테스트", "", "2024-01-01", "5000", "조회", "나가기"], ListFormat::Text);
        app.run().unwrap();
        let listed = app.service.list();
        assert_eq!(listed.voucher_responses.len(), 1);
        let v = &listed.voucher_responses[0];
        assert_eq!(v.name, "테스트");
        assert_eq!(v.voucher_type, VoucherType::Fix);
        assert_eq!(v.minimum_price_condition, 0);
        assert_eq!(v.discount, 5000);
        assert_eq!(v.expires_at, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_milli_opt(23, 59, 59, 999).unwrap());

        let out = output(&app);
        assert!(out.contains("=== 바우처 생성완료 ==="));
        assert!(out.contains("바우처들을 조회합니다.\n[정액 할인] 테스트 | 할인: 5000원 | 최소 주문 금액: 0원"));
        assert!(out.ends_with("어플리케이션을 종료합니다.\n"));
    }

    #[test]
    fn test_invalid_field_aborts_creation() {
        // bad type, blank name, bad date, percent out of range: each returns to the menu
        let mut app = controller(
            vec![
                "생성", "반값 할인",
                "생성", "정률 할인", "  ",
                "생성", "정률 할인", "여름", "", "2024/01/01",
                "생성", "정률 할인", "여름", "1000", "2024-01-01 10:00:00.000", "101",
                "나가기",
            ],
            ListFormat::Text,
        );
        app.run().unwrap();
        assert!(app.service.list().voucher_responses.is_empty());
        let out = output(&app);
        assert!(out.contains(&VoucherError::InvalidVoucherType("반값 할인".into()).to_string()));
        assert!(out.contains(&VoucherError::BlankName.to_string()));
        assert!(out.contains(&VoucherError::InvalidDate("2024/01/01".into()).to_string()));
        assert!(out.contains(&VoucherError::DiscountOutOfRange { value: 101, min: 1, max: 100 }.to_string()));
        assert!(!out.contains("=== 바우처 생성완료 ==="));
    }

    #[test]
    fn test_unknown_command_reprompts() {
        let mut app = controller(vec!["삭제", "조회", "나가기"], ListFormat::Text);
        app.run().unwrap();
        let out = output(&app);
        assert!(out.contains("존재하지 않는 명령어입니다: 삭제"));
        assert_eq!(out.matches("=== 바우처 프로그램 ===").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut app = controller(vec!["조회"], ListFormat::Text);
        app.run().unwrap();
        assert!(output(&app).ends_with("어플리케이션을 종료합니다.\n"));
    }

    #[test]
    fn test_end_of_input_mid_creation_is_fatal() {
        let mut app = controller(vec!["생성", "정률 할인"], ListFormat::Text);
        assert!(matches!(app.run(), Err(VoucherError::Io(_))));
    }

    #[test]
    fn test_json_listing() {
        let mut app = controller(vec!["생성", "정률 할인", "가을", "2000", "2024-01-01", "10", "조회", "나가기"], ListFormat::Json);
        app.run().unwrap();
        let out = output(&app);
        let json_line = out.lines().find(|l| l.starts_with('{')).unwrap();
        let value: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(value["name"], "가을");
        assert_eq!(value["minimum_price_condition"], 2000);
        assert_eq!(value["discount"], 10);
    }
}
