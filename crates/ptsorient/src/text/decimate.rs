use crate::record::{parse_record, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Accepting,
    Skipping,
}

/// Records kept by `decimate`, plus how many lines it looked at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decimated<'a> {
    pub records: Vec<Record<'a>>,
    /// Emitted records plus lines swallowed while skipping.
    pub considered: usize,
}

/// Select the coordinate records to emit.
///
/// With `minimize` off every coordinate record is emitted. With it on, each
/// emitted record swallows the next *physical* line, whether or not that
/// line is a record; non-record lines met while accepting are ignored.
pub fn decimate<'a, I>(lines: I, minimize: bool) -> Decimated<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Decimated::default();
    let mut state = State::Accepting;
    for line in lines {
        match state {
            State::Accepting => {
                let Some(record) = parse_record(line) else {
                    continue;
                };
                out.records.push(record);
                out.considered += 1;
                if minimize {
                    state = State::Skipping;
                }
            }
            State::Skipping => {
                out.considered += 1;
                state = State::Accepting;
            }
        }
    }
    out
}
