mod coroutine {
    #![allow(dead_code)]

    include!("../src/doc_examples/coroutine.rs");

    fn output_of (count: Option<&str>)
      -> Result<String, String>
    {
        let mut out = Vec::new();
        run(count.map(String::from), &mut out).map_err(|err| err.to_string())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_count ()
    {
        assert_eq!(
            output_of(None).unwrap(),
            "\
                Yielded 0\n\
                Yielded 1\n\
                Yielded 2\n\
                Yielded 3\n\
                Yielded 4\n\
                Coroutine finished.\n\
            ",
        );
    }

    #[test]
    fn empty ()
    {
        assert_eq!(output_of(Some("0")).unwrap(), "Coroutine finished.\n");
    }

    #[test]
    fn explicit_count ()
    {
        let out = output_of(Some("3")).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), [
            "Yielded 0",
            "Yielded 1",
            "Yielded 2",
            "Coroutine finished.",
        ]);
    }

    #[test]
    fn bad_count ()
    {
        let err = output_of(Some("five")).unwrap_err();
        assert!(err.starts_with("invalid count \"five\""), "{}", err);
    }
}
