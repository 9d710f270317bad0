pub trait Extract {
    fn extract<W: std::io::Write>(&self, file: &mut W) -> std::io::Result<()>;
}

impl Extract for definitions::Alignment {
    fn extract<W: std::io::Write>(&self, file: &mut W) -> std::io::Result<()> {
        for seq in self.sequences.iter() {
            writeln!(file, "{seq}")?;
        }
        Ok(())
    }
}
