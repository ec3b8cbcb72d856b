//! Console prompts and rendering.

use std::io;
use chrono::NaiveDateTime;
use crate::config::ListFormat;
use crate::console::Console;
use crate::controller::Command;
use crate::parser::{parse_to_amount_or_percent, parse_to_local_date_time, parse_to_minimum_price_condition};
use crate::service::{VoucherCreationRequest, VoucherResponse, VoucherResponses};
use crate::validation::{check_invalid_type, check_null_or_blank};
use crate::{Result, VoucherError};

const BLANK: &str = "";
const OPENING_MESSAGE: &str = "=== 바우처 프로그램 ===
프로그램을 종료하려면 \"나가기\" 를 입력하세요.
새로운 바우처을 생성하려면 \"생성\" 를 입력하세요.
모든 바우처을 나열하려면 \"조회\" 를 입력하세요.

입력: ";
const CREATE_MESSAGE: &str = "바우처을 생성합니다.";
const LIST_MESSAGE: &str = "바우처들을 조회합니다.";
const EXIT_MESSAGE: &str = "어플리케이션을 종료합니다.";
const INPUT_TYPE: &str = "바우처의 타입을 입력해주세요.
정률 할인 쿠폰을 생성하려면 \"정률 할인\" 을 입력하세요.
정액 할인 쿠폰을 생성하려면 \"정액 할인\" 을 입력하세요.

입력: ";
const INPUT_NAME: &str = "바우처의 이름을 입력하세요. (1자 이상)

입력: ";
const INPUT_MINIMUM_PRICE_CONDITION: &str = "바우처의 사용 최소금액 조건을 입력하세요.
미입력 시 0원으로 설정됩니다.

입력: ";
const INPUT_EXPIRED_DATETIME: &str = "바우처의 만료기한을 입력하세요. (예시: yyyy-MM-dd, yyyy-MM-dd HH:mm:ss.SSS)
yyyy-MM-dd 입력 시, yyyy-MM-dd 23:59:59.999로 설정됩니다.

입력: ";
const INPUT_AMOUNT_OR_PERCENT: &str = "할인 금액을 아래 한도에 맞춰 입력하세요.
정률 할인 시: 1 ~ 100% (퍼센트 제외)
정액 할인 시: 10 ~ 10,000,000원 (원 제외)

입력: ";
const CREATED_VOUCHER_INFO: &str = "=== 바우처 생성완료 ===";

pub struct ConsoleView<C> {
    console: C,
    list_format: ListFormat,
}

impl<C: Console> ConsoleView<C> {
    pub fn new(console: C, list_format: ListFormat) -> Self { Self { console, list_format } }

    /// End of input counts as an exit request.
    pub fn select_command(&mut self) -> Result<Command> {
        self.console.print(OPENING_MESSAGE)?;
        let Some(input) = self.console.input_line()? else {
            self.print_new_line()?;
            return Ok(Command::Exit);
        };
        self.print_new_line()?;
        Command::from(&input)
    }

    /// Collects every field in order; the first invalid field aborts the whole request.
    pub fn create_voucher_creation_request_from_input(&mut self) -> Result<VoucherCreationRequest> {
        self.console.print_line(CREATE_MESSAGE)?;

        let voucher_type = self.input_type()?;
        self.print_new_line()?;

        let name = self.input_name()?;
        self.print_new_line()?;

        let minimum_price_condition = self.input_minimum_price_condition()?;
        self.print_new_line()?;

        let expires_at = self.input_expired_at()?;
        self.print_new_line()?;

        let discount = self.input_amount_or_percent()?;
        self.print_new_line()?;

        Ok(VoucherCreationRequest { voucher_type, name, minimum_price_condition, expires_at, discount })
    }

    fn input_type(&mut self) -> Result<String> {
        let voucher_type = self.prompt(INPUT_TYPE)?;
        check_invalid_type(&voucher_type)?;
        Ok(voucher_type)
    }

    fn input_name(&mut self) -> Result<String> {
        let name = self.prompt(INPUT_NAME)?;
        check_null_or_blank(&name)?;
        Ok(name)
    }

    fn input_minimum_price_condition(&mut self) -> Result<u64> {
        let raw = self.prompt(INPUT_MINIMUM_PRICE_CONDITION)?;
        parse_to_minimum_price_condition(&raw)
    }

    fn input_expired_at(&mut self) -> Result<NaiveDateTime> {
        let raw = self.prompt(INPUT_EXPIRED_DATETIME)?;
        parse_to_local_date_time(&raw)
    }

    fn input_amount_or_percent(&mut self) -> Result<i64> {
        let raw = self.prompt(INPUT_AMOUNT_OR_PERCENT)?;
        parse_to_amount_or_percent(&raw)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.console.print(message)?;
        self.console
            .input_line()?
            .ok_or_else(|| VoucherError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "입력이 종료되었습니다.")))
    }

    pub fn print_created_voucher(&mut self, response: &VoucherResponse) -> Result<()> {
        self.console.print_line(CREATED_VOUCHER_INFO)?;
        self.print_voucher_response(response)
    }

    pub fn list_vouchers(&mut self, responses: &VoucherResponses) -> Result<()> {
        self.console.print_line(LIST_MESSAGE)?;
        for response in &responses.voucher_responses {
            self.print_voucher_response(response)?;
        }
        self.print_new_line()
    }

    fn print_voucher_response(&mut self, response: &VoucherResponse) -> Result<()> {
        let line = match self.list_format {
            ListFormat::Text => response.to_string(),
            ListFormat::Json => serde_json::to_string(response)?,
        };
        self.console.print_line(&line)?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.console.print_line(EXIT_MESSAGE)?;
        Ok(())
    }

    pub fn print_error_message(&mut self, message: &str) -> Result<()> {
        self.console.print_line(message)?;
        self.print_new_line()
    }

    fn print_new_line(&mut self) -> Result<()> {
        self.console.print_line(BLANK)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn console(&self) -> &C { &self.console }
}
