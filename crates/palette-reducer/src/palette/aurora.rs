//! The default 256-color palette.

use crate::color::Rgba;

/// DawnBringer's Aurora palette, with one gray replaced by transparent
/// black in slot 0.
pub const AURORA: [Rgba; 256] = [
    Rgba(0x00000000), Rgba(0x010101FF), Rgba(0x131313FF), Rgba(0x252525FF),
    Rgba(0x373737FF), Rgba(0x494949FF), Rgba(0x5B5B5BFF), Rgba(0x6E6E6EFF),
    Rgba(0x808080FF), Rgba(0x929292FF), Rgba(0xA4A4A4FF), Rgba(0xB6B6B6FF),
    Rgba(0xC9C9C9FF), Rgba(0xDBDBDBFF), Rgba(0xEDEDEDFF), Rgba(0xFFFFFFFF),
    Rgba(0x007F7FFF), Rgba(0x3FBFBFFF), Rgba(0x00FFFFFF), Rgba(0xBFFFFFFF),
    Rgba(0x8181FFFF), Rgba(0x0000FFFF), Rgba(0x3F3FBFFF), Rgba(0x00007FFF),
    Rgba(0x0F0F50FF), Rgba(0x7F007FFF), Rgba(0xBF3FBFFF), Rgba(0xF500F5FF),
    Rgba(0xFD81FFFF), Rgba(0xFFC0CBFF), Rgba(0xFF8181FF), Rgba(0xFF0000FF),
    Rgba(0xBF3F3FFF), Rgba(0x7F0000FF), Rgba(0x551414FF), Rgba(0x7F3F00FF),
    Rgba(0xBF7F3FFF), Rgba(0xFF7F00FF), Rgba(0xFFBF81FF), Rgba(0xFFFFBFFF),
    Rgba(0xFFFF00FF), Rgba(0xBFBF3FFF), Rgba(0x7F7F00FF), Rgba(0x007F00FF),
    Rgba(0x3FBF3FFF), Rgba(0x00FF00FF), Rgba(0xAFFFAFFF), Rgba(0xBCAFC0FF),
    Rgba(0xCBAA89FF), Rgba(0xA6A090FF), Rgba(0x7E9494FF), Rgba(0x6E8287FF),
    Rgba(0x7E6E60FF), Rgba(0xA0695FFF), Rgba(0xC07872FF), Rgba(0xD08A74FF),
    Rgba(0xE19B7DFF), Rgba(0xEBAA8CFF), Rgba(0xF5B99BFF), Rgba(0xF6C8AFFF),
    Rgba(0xF5E1D2FF), Rgba(0x573B3BFF), Rgba(0x73413CFF), Rgba(0x8E5555FF),
    Rgba(0xAB7373FF), Rgba(0xC78F8FFF), Rgba(0xE3ABABFF), Rgba(0xF8D2DAFF),
    Rgba(0xE3C7ABFF), Rgba(0xC49E73FF), Rgba(0x8F7357FF), Rgba(0x73573BFF),
    Rgba(0x3B2D1FFF), Rgba(0x414123FF), Rgba(0x73733BFF), Rgba(0x8F8F57FF),
    Rgba(0xA2A255FF), Rgba(0xB5B572FF), Rgba(0xC7C78FFF), Rgba(0xDADAABFF),
    Rgba(0xEDEDC7FF), Rgba(0xC7E3ABFF), Rgba(0xABC78FFF), Rgba(0x8EBE55FF),
    Rgba(0x738F57FF), Rgba(0x587D3EFF), Rgba(0x465032FF), Rgba(0x191E0FFF),
    Rgba(0x235037FF), Rgba(0x3B573BFF), Rgba(0x506450FF), Rgba(0x3B7349FF),
    Rgba(0x578F57FF), Rgba(0x73AB73FF), Rgba(0x64C082FF), Rgba(0x8FC78FFF),
    Rgba(0xA2D8A2FF), Rgba(0xE1F8FAFF), Rgba(0xB4EECAFF), Rgba(0xABE3C5FF),
    Rgba(0x87B48EFF), Rgba(0x507D5FFF), Rgba(0x0F6946FF), Rgba(0x1E2D23FF),
    Rgba(0x234146FF), Rgba(0x3B7373FF), Rgba(0x64ABABFF), Rgba(0x8FC7C7FF),
    Rgba(0xABE3E3FF), Rgba(0xC7F1F1FF), Rgba(0xBED2F0FF), Rgba(0xABC7E3FF),
    Rgba(0xA8B9DCFF), Rgba(0x8FABC7FF), Rgba(0x578FC7FF), Rgba(0x57738FFF),
    Rgba(0x3B5773FF), Rgba(0x0F192DFF), Rgba(0x1F1F3BFF), Rgba(0x3B3B57FF),
    Rgba(0x494973FF), Rgba(0x57578FFF), Rgba(0x736EAAFF), Rgba(0x7676CAFF),
    Rgba(0x8F8FC7FF), Rgba(0xABABE3FF), Rgba(0xD0DAF8FF), Rgba(0xE3E3FFFF),
    Rgba(0xAB8FC7FF), Rgba(0x8F57C7FF), Rgba(0x73578FFF), Rgba(0x573B73FF),
    Rgba(0x3C233CFF), Rgba(0x463246FF), Rgba(0x724072FF), Rgba(0x8F578FFF),
    Rgba(0xAB57ABFF), Rgba(0xAB73ABFF), Rgba(0xEBACE1FF), Rgba(0xFFDCF5FF),
    Rgba(0xE3C7E3FF), Rgba(0xE1B9D2FF), Rgba(0xD7A0BEFF), Rgba(0xC78FB9FF),
    Rgba(0xC87DA0FF), Rgba(0xC35A91FF), Rgba(0x4B2837FF), Rgba(0x321623FF),
    Rgba(0x280A1EFF), Rgba(0x401811FF), Rgba(0x621800FF), Rgba(0xA5140AFF),
    Rgba(0xDA2010FF), Rgba(0xD5524AFF), Rgba(0xFF3C0AFF), Rgba(0xF55A32FF),
    Rgba(0xFF6262FF), Rgba(0xF6BD31FF), Rgba(0xFFA53CFF), Rgba(0xD79B0FFF),
    Rgba(0xDA6E0AFF), Rgba(0xB45A00FF), Rgba(0xA04B05FF), Rgba(0x5F3214FF),
    Rgba(0x53500AFF), Rgba(0x626200FF), Rgba(0x8C805AFF), Rgba(0xAC9400FF),
    Rgba(0xB1B10AFF), Rgba(0xE6D55AFF), Rgba(0xFFD510FF), Rgba(0xFFEA4AFF),
    Rgba(0xC8FF41FF), Rgba(0x9BF046FF), Rgba(0x96DC19FF), Rgba(0x73C805FF),
    Rgba(0x6AA805FF), Rgba(0x3C6E14FF), Rgba(0x283405FF), Rgba(0x204608FF),
    Rgba(0x0C5C0CFF), Rgba(0x149605FF), Rgba(0x0AD70AFF), Rgba(0x14E60AFF),
    Rgba(0x7DFF73FF), Rgba(0x4BF05AFF), Rgba(0x00C514FF), Rgba(0x05B450FF),
    Rgba(0x1C8C4EFF), Rgba(0x123832FF), Rgba(0x129880FF), Rgba(0x06C491FF),
    Rgba(0x00DE6AFF), Rgba(0x2DEBA8FF), Rgba(0x3CFEA5FF), Rgba(0x6AFFCDFF),
    Rgba(0x91EBFFFF), Rgba(0x55E6FFFF), Rgba(0x7DD7F0FF), Rgba(0x08DED5FF),
    Rgba(0x109CDEFF), Rgba(0x055A5CFF), Rgba(0x162C52FF), Rgba(0x0F377DFF),
    Rgba(0x004A9CFF), Rgba(0x326496FF), Rgba(0x0052F6FF), Rgba(0x186ABDFF),
    Rgba(0x2378DCFF), Rgba(0x699DC3FF), Rgba(0x4AA4FFFF), Rgba(0x90B0FFFF),
    Rgba(0x5AC5FFFF), Rgba(0xBEB9FAFF), Rgba(0x00BFFFFF), Rgba(0x007FFFFF),
    Rgba(0x4B7DC8FF), Rgba(0x786EF0FF), Rgba(0x4A5AFFFF), Rgba(0x6241F6FF),
    Rgba(0x3C3CF5FF), Rgba(0x101CDAFF), Rgba(0x0010BDFF), Rgba(0x231094FF),
    Rgba(0x0C2148FF), Rgba(0x5010B0FF), Rgba(0x6010D0FF), Rgba(0x8732D2FF),
    Rgba(0x9C41FFFF), Rgba(0x7F00FFFF), Rgba(0xBD62FFFF), Rgba(0xB991FFFF),
    Rgba(0xD7A5FFFF), Rgba(0xD7C3FAFF), Rgba(0xF8C6FCFF), Rgba(0xE673FFFF),
    Rgba(0xFF52FFFF), Rgba(0xDA20E0FF), Rgba(0xBD29FFFF), Rgba(0xBD10C5FF),
    Rgba(0x8C14BEFF), Rgba(0x5A187BFF), Rgba(0x641464FF), Rgba(0x410062FF),
    Rgba(0x320A46FF), Rgba(0x551937FF), Rgba(0xA01982FF), Rgba(0xC80078FF),
    Rgba(0xFF50BFFF), Rgba(0xFF6AC5FF), Rgba(0xFAA0B9FF), Rgba(0xFC3A8CFF),
    Rgba(0xE61E78FF), Rgba(0xBD1039FF), Rgba(0x98344DFF), Rgba(0x911437FF),
];
