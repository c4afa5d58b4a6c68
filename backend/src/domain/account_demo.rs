use super::models::{Account, ErrorChannel};
use log::info;
use std::io::{self, Write};

/// Walk two accounts through a deposit and an overdraw, printing balances to
/// `out`. The second account reports its overdraw on `channel`.
pub fn run_account_demo<W: Write, C: ErrorChannel>(out: &mut W, channel: C) -> io::Result<()> {
    let mut acc1 = Account::new();
    let mut acc2 = Account::with_channel(5000.0, channel);

    writeln!(out, "Balance (default constructor): {}", acc1.balance())?;

    acc1.deposit(1000.0);
    writeln!(out, "New balance acc1: {}", acc1.balance())?;

    writeln!(out, "Balance (second constructor):  {}", acc2.balance())?;

    let paid = acc2.withdraw(10000.0);
    info!("Requested 10000 from acc2, paid out {}", paid);
    writeln!(out, "New balance acc2: {}", acc2.balance())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_demo_output() {
        let mut buffer = Vec::new();
        let mut diagnostics: Vec<String> = Vec::new();
        run_account_demo(&mut buffer, &mut diagnostics).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Balance (default constructor): 0\n\
             New balance acc1: 1000\n\
             Balance (second constructor):  5000\n\
             New balance acc2: 0\n"
        );
        assert_eq!(diagnostics, vec!["You are broke!".to_string()]);
    }
}
